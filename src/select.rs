//! Picking the alert that owns a display slot.
//!
//! Highest priority wins; ties go to whichever alert was resolved first,
//! because resolution order follows event assertion order.  All helpers
//! are stable single passes, never sorts.

use crate::alert::Alert;
use crate::category::EventCategory;

/// Highest-priority alert, earliest on ties.
pub fn select_highest(alerts: &[Alert]) -> Option<&Alert> {
    select_highest_where(alerts, |_| true)
}

/// Like [`select_highest`], over the alerts matching `pred`.
pub fn select_highest_where<F>(alerts: &[Alert], mut pred: F) -> Option<&Alert>
where
    F: FnMut(&Alert) -> bool,
{
    let mut best: Option<&Alert> = None;
    for alert in alerts.iter().filter(|a| pred(a)) {
        match best {
            Some(current) if !alert.outranks(current) => {}
            _ => best = Some(alert),
        }
    }
    best
}

/// One winner per requested category, in the order given.  Categories
/// with no resolved alert are omitted.
pub fn select_per_category<'a>(
    alerts: &'a [Alert],
    categories: &[EventCategory],
) -> Vec<(EventCategory, &'a Alert)> {
    categories
        .iter()
        .filter_map(|&category| {
            select_highest_where(alerts, |a| a.category == category).map(|a| (category, a))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{AlertSize, AlertSpec, AlertStatus, AudibleAlert, Priority, VisualAlert};
    use crate::ids::EventId;

    fn alert(id: u16, priority: Priority, category: EventCategory) -> Alert {
        let spec = AlertSpec {
            text1: format!("alert {id}"),
            text2: String::new(),
            status: AlertStatus::Normal,
            size: AlertSize::Small,
            priority,
            visual: VisualAlert::None,
            audible: AudibleAlert::None,
            duration: 10,
            repeat: 0,
            creation_delay: 0,
        };
        Alert::new(spec, EventId(id), category)
    }

    #[test]
    fn first_of_equal_highest_wins() {
        let w = EventCategory::Warning;
        let alerts = [
            alert(1, Priority::Low, w),
            alert(2, Priority::High, w),
            alert(3, Priority::High, w),
            alert(4, Priority::Mid, w),
        ];
        assert_eq!(select_highest(&alerts).map(|a| a.event), Some(EventId(2)));
    }

    #[test]
    fn empty_selects_nothing() {
        assert!(select_highest(&[]).is_none());
    }

    #[test]
    fn filtered_selection() {
        let alerts = [
            alert(1, Priority::Highest, EventCategory::Permanent),
            alert(2, Priority::Low, EventCategory::Warning),
        ];
        let pick = select_highest_where(&alerts, |a| a.category == EventCategory::Warning);
        assert_eq!(pick.map(|a| a.event), Some(EventId(2)));
    }

    #[test]
    fn per_category_winners() {
        let alerts = [
            alert(1, Priority::Mid, EventCategory::Warning),
            alert(2, Priority::Low, EventCategory::NoEntry),
            alert(3, Priority::High, EventCategory::Warning),
        ];
        let picks = select_per_category(
            &alerts,
            &[EventCategory::Warning, EventCategory::Enable, EventCategory::NoEntry],
        );
        let ids: Vec<_> = picks.iter().map(|(c, a)| (*c, a.event)).collect();
        assert_eq!(
            ids,
            vec![
                (EventCategory::Warning, EventId(3)),
                (EventCategory::NoEntry, EventId(2)),
            ]
        );
    }
}
