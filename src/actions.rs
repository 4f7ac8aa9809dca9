//! Delegated handling of the per-dish action controls.
//!
//! Every rendered menu entry carries two controls ("Order Now" and "Add to
//! Plan"), each tagged with the dish id as string data. A single
//! [`ActionTable`] owned by the application resolves any control, present or
//! future, by looking up its kind and parsing the attached id.

use crate::catalog::{Catalog, MenuItem};
use crate::error::{AppError, Result};
use std::collections::HashMap;

/// What an action control does when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Order,
    AddToPlan,
}

impl ActionKind {
    pub const ALL: [ActionKind; 2] = [ActionKind::Order, ActionKind::AddToPlan];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Order => "Order Now",
            ActionKind::AddToPlan => "Add to Plan",
        }
    }

    /// Key that activates this control on the selected entry.
    pub fn key(self) -> char {
        match self {
            ActionKind::Order => 'o',
            ActionKind::AddToPlan => 'a',
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Order => write!(f, "order"),
            ActionKind::AddToPlan => write!(f, "add to plan"),
        }
    }
}

/// A rendered action button and its associated data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionControl {
    pub kind: ActionKind,
    /// Dish id, kept as text the way it is attached to the control.
    pub data_id: String,
}

impl ActionControl {
    pub fn for_item(kind: ActionKind, item: &MenuItem) -> Self {
        Self {
            kind,
            data_id: item.id.to_string(),
        }
    }

    /// Parses the attached id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidItemId`] unless the data is a positive integer.
    pub fn item_id(&self) -> Result<u32> {
        parse_item_id(&self.data_id)
    }
}

/// Parses a dish id from control data. Zero is never a valid id.
///
/// # Errors
///
/// Returns [`AppError::InvalidItemId`] for anything but a positive integer.
pub fn parse_item_id(data: &str) -> Result<u32> {
    match data.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidItemId(data.to_string())),
    }
}

type MessageFn = fn(&MenuItem) -> String;

fn order_message(item: &MenuItem) -> String {
    format!("Ordering \"{}\" is coming soon!", item.name)
}

fn plan_message(item: &MenuItem) -> String {
    format!("\"{}\" added to your meal plan.", item.name)
}

/// Dispatch table from action kind to popup message.
pub struct ActionTable {
    handlers: HashMap<ActionKind, MessageFn>,
}

impl ActionTable {
    pub fn new() -> Self {
        let mut handlers: HashMap<ActionKind, MessageFn> = HashMap::new();
        handlers.insert(ActionKind::Order, order_message);
        handlers.insert(ActionKind::AddToPlan, plan_message);
        Self { handlers }
    }

    /// Resolves a control against the catalog and builds the popup text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidItemId`] when the control data is malformed,
    /// or [`AppError::UnknownItem`] when no dish carries that id.
    pub fn dispatch(&self, catalog: &Catalog, control: &ActionControl) -> Result<String> {
        let id = control.item_id()?;
        let item = catalog.find(id).ok_or(AppError::UnknownItem(id))?;
        let message = self
            .handlers
            .get(&control.kind)
            .map_or_else(|| item.name.clone(), |handler| handler(item));
        Ok(message)
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(kind: ActionKind, data: &str) -> ActionControl {
        ActionControl {
            kind,
            data_id: data.to_string(),
        }
    }

    #[test]
    fn test_order_message() {
        let table = ActionTable::new();
        let msg = table
            .dispatch(&Catalog::sample(), &control(ActionKind::Order, "1"))
            .unwrap();
        assert_eq!(msg, "Ordering \"Avocado Toast\" is coming soon!");
    }

    #[test]
    fn test_add_to_plan_message() {
        let table = ActionTable::new();
        let msg = table
            .dispatch(&Catalog::sample(), &control(ActionKind::AddToPlan, "6"))
            .unwrap();
        assert_eq!(msg, "\"Veggie Sticks & Hummus\" added to your meal plan.");
    }

    #[test]
    fn test_unknown_id_is_an_error_not_a_message() {
        let table = ActionTable::new();
        let result = table.dispatch(&Catalog::sample(), &control(ActionKind::Order, "42"));
        assert!(matches!(result, Err(AppError::UnknownItem(42))));
    }

    #[test]
    fn test_malformed_ids_are_rejected() {
        for data in ["", "abc", "-1", "0", "1.5"] {
            assert!(
                matches!(parse_item_id(data), Err(AppError::InvalidItemId(_))),
                "accepted {data:?}"
            );
        }
        assert_eq!(parse_item_id(" 3 ").unwrap(), 3);
    }

    #[test]
    fn test_control_carries_item_id() {
        let catalog = Catalog::sample();
        let item = catalog.find(5).unwrap();
        let ctl = ActionControl::for_item(ActionKind::AddToPlan, item);
        assert_eq!(ctl.data_id, "5");
        assert_eq!(ctl.item_id().unwrap(), 5);
    }
}
