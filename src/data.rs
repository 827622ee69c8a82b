use serde::{Serialize, Serializer};

// Columns other than `id` are not guaranteed by the store, so a NULL comes
// back as `null` instead of failing the whole read.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    #[serde(serialize_with = "flag_as_int")]
    pub is_veg: Option<bool>,
    #[serde(serialize_with = "flag_as_int")]
    pub has_outdoor_seating: Option<bool>,
    #[serde(serialize_with = "flag_as_int")]
    pub is_luxury: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(serialize_with = "flag_as_int")]
    pub is_veg: Option<bool>,
}

/// Flags go over the wire as the store keeps them, `0` or `1`.
fn flag_as_int<S: Serializer>(flag: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match flag {
        Some(flag) => serializer.serialize_u8(u8::from(*flag)),
        None => serializer.serialize_none(),
    }
}

/// `{ "restaurants": [...] }`
#[derive(Debug, Serialize)]
pub struct Restaurants {
    pub restaurants: Vec<Restaurant>,
}

/// `{ "restaurant": {...} }`, absent when no row matched.
#[derive(Debug, Serialize)]
pub struct RestaurantDetails {
    pub restaurant: Option<Restaurant>,
}

/// `{ "dishes": [...] }`
#[derive(Debug, Serialize)]
pub struct Dishes {
    pub dishes: Vec<Dish>,
}

/// `{ "dish": {...} }`, absent when no row matched.
#[derive(Debug, Serialize)]
pub struct DishDetails {
    pub dish: Option<Dish>,
}
