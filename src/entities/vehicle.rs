use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Economy,
    Comfort,
    Van,
    Executive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub luggage_capacity: u32,
    pub base_price: Decimal,
    pub category: Category,
    pub features: Vec<String>,
    pub image: String,
}

impl Vehicle {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        name: &str,
        capacity: u32,
        luggage_capacity: u32,
        base_price: i64,
        category: Category,
        features: &[&str],
        image: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            luggage_capacity,
            base_price: Decimal::new(base_price, 0),
            category,
            features: features.iter().map(|&feature| feature.into()).collect(),
            image: image.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub const DEFAULT_VEHICLE_ID: &'static str = "economy";

    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new(vec![
            Vehicle::new(
                "economy",
                "Economy Sedan",
                4,
                2,
                15,
                Category::Economy,
                &["A/C", "Fabric Seats", "USB Charging"],
                "https://picsum.photos/id/111/1024/768",
            ),
            Vehicle::new(
                "comfort",
                "Comfort Sedan",
                4,
                3,
                20,
                Category::Comfort,
                &["A/C", "Bottled Water", "Extra Legroom", "Leather Seats"],
                "https://picsum.photos/id/183/1024/768",
            ),
            Vehicle::new(
                "van",
                "Van / Group",
                8,
                6,
                35,
                Category::Van,
                &["Large Luggage Area", "Dual A/C", "Ideal for Groups"],
                "https://picsum.photos/id/133/1024/768",
            ),
            Vehicle::new(
                "exec",
                "Executive / SUV",
                4,
                4,
                45,
                Category::Executive,
                &["Leather Interior", "Privacy Glass", "Premium Audio", "VIP Service"],
                "https://picsum.photos/id/655/1024/768",
            ),
        ])
    }
}
