use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of cupcakes in a fresh order
pub const DEFAULT_QUANTITY: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CupcakeType {
    #[default]
    Vanilla,
    Strawberry,
    Chocolate,
    Rainbow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("unknown cupcake type index {0}")]
    UnknownType(usize),
}

impl CupcakeType {
    pub const ALL: [CupcakeType; 4] = [
        CupcakeType::Vanilla,
        CupcakeType::Strawberry,
        CupcakeType::Chocolate,
        CupcakeType::Rainbow,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Vanilla => 0,
            Self::Strawberry => 1,
            Self::Chocolate => 2,
            Self::Rainbow => 3,
        }
    }

    pub fn from_index(index: usize) -> Result<Self, OrderError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(OrderError::UnknownType(index))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Vanilla => "Vanilla",
            Self::Strawberry => "Strawberry",
            Self::Chocolate => "Chocolate",
            Self::Rainbow => "Rainbow",
        }
    }
}

/// Price of a cupcake order.
///
/// $2 per cake, plus half the type index for fancier flavours, $1 per cake
/// for extra frosting and $0.50 per cake for sprinkles.
pub fn cost(quantity: u32, type_index: usize, extra_frosting: bool, add_sprinkle: bool) -> f64 {
    let quantity = f64::from(quantity);
    let mut cost = quantity * 2.0;
    cost += type_index as f64 / 2.0;

    if extra_frosting {
        cost += quantity;
    }

    if add_sprinkle {
        cost += quantity / 2.0;
    }

    cost
}

/// A cupcake order with its delivery details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(rename = "type")]
    pub cupcake_type: CupcakeType,
    pub quantity: u32,
    special_request_enabled: bool,
    extra_frosting: bool,
    add_sprinkle: bool,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub zip: String,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            cupcake_type: CupcakeType::default(),
            quantity: DEFAULT_QUANTITY,
            special_request_enabled: false,
            extra_frosting: false,
            add_sprinkle: false,
            name: String::new(),
            street_address: String::new(),
            city: String::new(),
            zip: String::new(),
        }
    }
}

impl Order {
    pub fn special_request_enabled(&self) -> bool {
        self.special_request_enabled
    }

    /// Toggle special requests. Turning them off drops both add-ons.
    pub fn set_special_request_enabled(&mut self, enabled: bool) {
        self.special_request_enabled = enabled;
        if !enabled {
            self.extra_frosting = false;
            self.add_sprinkle = false;
        }
    }

    pub fn extra_frosting(&self) -> bool {
        self.extra_frosting
    }

    pub fn add_sprinkle(&self) -> bool {
        self.add_sprinkle
    }

    /// Drop add-ons that arrived without special requests enabled
    pub fn normalized(mut self) -> Self {
        let enabled = self.special_request_enabled;
        self.set_special_request_enabled(enabled);
        self
    }

    pub fn has_valid_address(&self) -> bool {
        ![&self.name, &self.street_address, &self.city, &self.zip]
            .iter()
            .any(|field| field.is_empty())
    }

    pub fn cost(&self) -> f64 {
        cost(
            self.quantity,
            self.cupcake_type.index(),
            self.extra_frosting,
            self.add_sprinkle,
        )
    }
}
