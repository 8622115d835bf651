use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// "Battery_Failure" -> "Battery Failure" for display.
pub fn display_label(raw: &str) -> String {
    raw.replace('_', " ")
}

/// Window-aggregated RUL is shown with two decimals.
pub fn format_rul(rul: f64) -> String {
    format!("{:.2} days", rul)
}

/// Inspection window: 70% of the predicted RUL, never less than a day.
pub fn inspection_window_days(rul: f64) -> i64 {
    ((rul * 0.7).floor() as i64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_drop_underscores() {
        assert_eq!(display_label("Battery_Failure"), "Battery Failure");
        assert_eq!(display_label("No_Failure"), "No Failure");
        assert_eq!(display_label("Motor"), "Motor");
    }

    #[test]
    fn rul_is_formatted_with_two_decimals() {
        assert_eq!(format_rul(45.3), "45.30 days");
        assert_eq!(format_rul(1.0), "1.00 days");
    }

    #[test]
    fn inspection_window_is_clamped_to_a_day() {
        assert_eq!(inspection_window_days(45.3), 31);
        assert_eq!(inspection_window_days(100.0), 70);
        assert_eq!(inspection_window_days(1.0), 1);
        assert_eq!(inspection_window_days(0.5), 1);
    }
}
