//! Validity window of an order.

use crate::OrderError;

/// Window applied when no end date is given.
pub const DEFAULT_ORDER_DURATION_SECS: u64 = 24 * 60 * 60;

/// Latest end date accepted, relative to the current time.
pub const MAX_ORDER_DURATION_SECS: u64 = 30 * 24 * 60 * 60;

/// Validated `[start_date, end_date]` window in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderWindow {
	pub start_date: u64,
	pub end_date: u64,
}

impl OrderWindow {
	/// Applies defaults and checks the window against `now`.
	///
	/// The start defaults to `now` and must not lie in the past. The end
	/// defaults to one day after `now`, must not precede the start and must
	/// fall within thirty days of `now`.
	pub fn resolve(
		start_date: Option<u64>,
		end_date: Option<u64>,
		now: u64,
	) -> Result<Self, OrderError> {
		let start_date = start_date.unwrap_or(now);
		if start_date < now {
			return Err(OrderError::InvalidStartDate { start_date, now });
		}

		let end_date = end_date.unwrap_or(now + DEFAULT_ORDER_DURATION_SECS);
		if end_date < start_date {
			return Err(OrderError::InvalidEndDate {
				start_date,
				end_date,
			});
		}

		let max_end_date = now + MAX_ORDER_DURATION_SECS;
		if end_date > max_end_date {
			return Err(OrderError::InvalidDuration {
				end_date,
				max_end_date,
			});
		}

		Ok(Self {
			start_date,
			end_date,
		})
	}
}
