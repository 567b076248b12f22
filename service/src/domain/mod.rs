//! Domain definitions.

pub mod address;
pub mod buyer;
pub mod characteristics;
pub mod property;
pub mod tag;

pub use self::{
    address::Address,
    buyer::Buyer,
    characteristics::{Characteristic, Characteristics},
    property::Property,
    tag::Tag,
};
