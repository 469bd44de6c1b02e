pub mod deck;
pub mod sidebar;
