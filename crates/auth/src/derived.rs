//! Session-scoped state derived from the principal: pro-rated holidays,
//! notification counters and the absence-view flag.

use chrono::{Datelike, NaiveDate};

use crate::identity::current_principal_mut;
use crate::{AuthzError, Employee, NotificationCounters, SecurityContext};

/// Fixed year length used for pro-ration (no leap-year adjustment).
pub const DAYS_PER_YEAR: i64 = 365;

/// Holidays still pending this year, pro-rated from the annual entitlement.
///
/// `trunc(annual * (365 - day_of_year) / 365)`, where `day_of_year` is 1-based.
/// Returns 0 when there is no principal or no entitlement. On day 366 of a
/// leap year the numerator goes negative and the result is clamped to 0.
pub fn pending_holidays(principal: Option<&Employee>, today: NaiveDate) -> u32 {
    let Some(annual) = principal.and_then(|p| p.annual_holidays) else {
        return 0;
    };

    let day_of_year = i64::from(today.ordinal());
    let pending = i64::from(annual) * (DAYS_PER_YEAR - day_of_year) / DAYS_PER_YEAR;

    u32::try_from(pending.max(0)).unwrap_or(u32::MAX)
}

/// Replace the principal's pending counters and recompute their total.
///
/// Inputs are counts already computed from storage by the caller; they are
/// not validated. Returns the snapshot that was stored.
pub fn update_notification_counters<C>(
    ctx: &mut C,
    absences: u32,
    absences_owned: u32,
    delegations: u32,
) -> Result<NotificationCounters, AuthzError>
where
    C: SecurityContext + ?Sized,
{
    let principal = current_principal_mut(ctx)?;
    let counters = NotificationCounters::new(absences, absences_owned, delegations);
    principal.counters = counters;

    tracing::debug!(
        employee_id = %principal.id,
        absences,
        absences_owned,
        delegations,
        total = counters.pending_notifications(),
        "notification counters updated"
    );
    Ok(counters)
}

/// Record whether the principal has viewed their absences this session.
pub fn update_absence_view_flag<C>(ctx: &mut C, seen: bool) -> Result<(), AuthzError>
where
    C: SecurityContext + ?Sized,
{
    let principal = current_principal_mut(ctx)?;
    principal.absence_views = seen;
    tracing::debug!(employee_id = %principal.id, seen, "absence view flag updated");
    Ok(())
}
