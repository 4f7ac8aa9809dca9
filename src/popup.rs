//! Mock order confirmation popup.

/// Modal dialog showing a single literal message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderPopup {
    message: Option<String>,
}

impl OrderPopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the popup with the given text, replacing any previous message.
    pub fn open(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Hides the popup and forgets its message.
    pub fn close(&mut self) {
        self.message = None;
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_shows_literal_message() {
        let mut popup = OrderPopup::new();
        assert!(!popup.is_open());
        popup.open("Ordering \"Quinoa Salad\" is coming soon!");
        assert!(popup.is_open());
        assert_eq!(popup.message(), Some("Ordering \"Quinoa Salad\" is coming soon!"));
    }

    #[test]
    fn test_open_close_twice_leaves_no_residue() {
        let mut popup = OrderPopup::new();
        for msg in ["first", "second"] {
            popup.open(msg);
            popup.close();
        }
        assert!(!popup.is_open());
        assert_eq!(popup.message(), None);
        assert_eq!(popup, OrderPopup::new());

        popup.open("third");
        assert_eq!(popup.message(), Some("third"));
    }

    #[test]
    fn test_close_when_closed_is_harmless() {
        let mut popup = OrderPopup::new();
        popup.close();
        assert!(!popup.is_open());
    }
}
