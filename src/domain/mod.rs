pub mod menu_item;
pub mod order;
pub mod product;

pub use menu_item::{simulated_menu, GeneratedMenuItem};
pub use order::{Order, OrderCreate, OrderItem, OrderStatus};
pub use product::ProductCreate;
