//! Domain models for the ordering backend

mod flavor;
mod order;
mod pizza;
mod refs;
mod size;
mod status;
mod topping;

pub use flavor::{Flavor, FlavorCreate};
pub use order::{
    DeliveryType, Order, OrderCreate, OrderCustomer, OrderDelivery, OrderLine, OrderLineRequest,
    OrderUpdate, StatusHistoryEntry,
};
pub use pizza::Pizza;
pub use refs::Ref;
pub use size::{Size, SizeName};
pub use status::{Status, StatusName};
pub use topping::Topping;
