//! Buyer and seller agents
//!
//! An agent is one participant of the auction fixture. Its role decides the
//! organization it enrolls with and how its price is submitted.

use std::fmt;

/// Side of the auction an agent trades on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    /// Organization tag the client enrolls this role under
    pub fn organization(self) -> &'static str {
        match self {
            Role::Buyer => "org1",
            Role::Seller => "org2",
        }
    }

    /// Prefix of the user name (`buyer1`, `seller2`, ...)
    pub fn label(self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A buyer or seller record
///
/// Fields are fixed at construction. For a buyer `price` is the total
/// willingness-to-pay for `quantity` units; for a seller it is the per-unit
/// ask.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    role: Role,
    id: u32,
    quantity: u32,
    price: f64,
}

impl Agent {
    pub fn new(role: Role, id: u32, quantity: u32, price: f64) -> Self {
        Self {
            role,
            id,
            quantity,
            price,
        }
    }

    pub fn buyer(id: u32, quantity: u32, price: f64) -> Self {
        Self::new(Role::Buyer, id, quantity, price)
    }

    pub fn seller(id: u32, quantity: u32, price: f64) -> Self {
        Self::new(Role::Seller, id, quantity, price)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// 1-based position within the agent's role
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Role-qualified user name, e.g. `seller2`
    pub fn user_name(&self) -> String {
        format!("{}{}", self.role.label(), self.id)
    }

    /// Price argument of the bid command
    ///
    /// Sellers submit a two-element tuple with a trailing zero; the chaincode
    /// tells buyers and sellers apart by the number of price elements.
    pub fn price_field(&self) -> String {
        match self.role {
            Role::Buyer => self.price.to_string(),
            Role::Seller => format!("{},0", self.price),
        }
    }
}
