use std::str::FromStr;

use anyhow::Context;
use derive_builder::Builder;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::data::{Dish, DishDetails, Dishes, Restaurant, RestaurantDetails, Restaurants};

/// Open the store behind `url`.
///
/// The file must already exist and is opened read-only. A single connection
/// is shared by every request for the lifetime of the process.
pub async fn open(url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("invalid database url {url}"))?
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .with_context(|| format!("fail to open database {url}"))?;

    Ok(pool)
}

pub async fn ping(db_conn: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query("SELECT 1")
        .execute(db_conn)
        .await
        .context("fail to reach database")?;
    Ok(())
}

#[tracing::instrument(skip(db_conn))]
pub async fn fetch_all_restaurants(db_conn: &SqlitePool) -> anyhow::Result<Restaurants> {
    let restaurants = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, cuisine, rating, isVeg, hasOutdoorSeating, isLuxury FROM restaurants",
    )
    .fetch_all(db_conn)
    .await
    .context("fail to fetch restaurants")?;

    Ok(Restaurants { restaurants })
}

#[tracing::instrument(skip(db_conn))]
pub async fn get_restaurant_by_id(
    db_conn: &SqlitePool,
    id: i64,
) -> anyhow::Result<RestaurantDetails> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        r#"
SELECT id, name, cuisine, rating, isVeg, hasOutdoorSeating, isLuxury
FROM restaurants
WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(db_conn)
    .await
    .with_context(|| format!("fail to get restaurant {id}"))?;

    Ok(RestaurantDetails { restaurant })
}

#[tracing::instrument(skip(db_conn))]
pub async fn get_restaurants_by_cuisine(
    db_conn: &SqlitePool,
    cuisine: &str,
) -> anyhow::Result<Restaurants> {
    let restaurants = sqlx::query_as::<_, Restaurant>(
        r#"
SELECT id, name, cuisine, rating, isVeg, hasOutdoorSeating, isLuxury
FROM restaurants
WHERE cuisine = ?"#,
    )
    .bind(cuisine)
    .fetch_all(db_conn)
    .await
    .with_context(|| format!("fail to get restaurants by cuisine {cuisine}"))?;

    Ok(Restaurants { restaurants })
}

/// Every flag must match exactly; there is no partial match.
#[derive(Builder, Debug, Clone, Copy)]
pub struct RestaurantFilter {
    is_veg: bool,
    has_outdoor_seating: bool,
    is_luxury: bool,
}

#[tracing::instrument(skip(db_conn))]
pub async fn get_restaurants_by_filter(
    db_conn: &SqlitePool,
    filter: RestaurantFilter,
) -> anyhow::Result<Restaurants> {
    let RestaurantFilter {
        is_veg,
        has_outdoor_seating,
        is_luxury,
    } = filter;

    let restaurants = sqlx::query_as::<_, Restaurant>(
        r#"
SELECT id, name, cuisine, rating, isVeg, hasOutdoorSeating, isLuxury
FROM restaurants
WHERE isVeg = ? AND hasOutdoorSeating = ? AND isLuxury = ?"#,
    )
    .bind(is_veg)
    .bind(has_outdoor_seating)
    .bind(is_luxury)
    .fetch_all(db_conn)
    .await
    .context("fail to filter restaurants")?;

    Ok(Restaurants { restaurants })
}

#[tracing::instrument(skip(db_conn))]
pub async fn get_restaurants_sorted_by_rating(
    db_conn: &SqlitePool,
) -> anyhow::Result<Restaurants> {
    let restaurants = sqlx::query_as::<_, Restaurant>(
        r#"
SELECT id, name, cuisine, rating, isVeg, hasOutdoorSeating, isLuxury
FROM restaurants
ORDER BY rating DESC, id"#,
    )
    .fetch_all(db_conn)
    .await
    .context("fail to sort restaurants by rating")?;

    Ok(Restaurants { restaurants })
}

#[tracing::instrument(skip(db_conn))]
pub async fn fetch_all_dishes(db_conn: &SqlitePool) -> anyhow::Result<Dishes> {
    let dishes = sqlx::query_as::<_, Dish>("SELECT id, name, price, isVeg FROM dishes")
        .fetch_all(db_conn)
        .await
        .context("fail to fetch dishes")?;

    Ok(Dishes { dishes })
}

#[tracing::instrument(skip(db_conn))]
pub async fn get_dish_by_id(db_conn: &SqlitePool, id: i64) -> anyhow::Result<DishDetails> {
    let dish = sqlx::query_as::<_, Dish>("SELECT id, name, price, isVeg FROM dishes WHERE id = ?")
        .bind(id)
        .fetch_optional(db_conn)
        .await
        .with_context(|| format!("fail to get dish {id}"))?;

    Ok(DishDetails { dish })
}

#[tracing::instrument(skip(db_conn))]
pub async fn get_dishes_by_filter(db_conn: &SqlitePool, is_veg: bool) -> anyhow::Result<Dishes> {
    let dishes =
        sqlx::query_as::<_, Dish>("SELECT id, name, price, isVeg FROM dishes WHERE isVeg = ?")
            .bind(is_veg)
            .fetch_all(db_conn)
            .await
            .context("fail to filter dishes")?;

    Ok(Dishes { dishes })
}

#[tracing::instrument(skip(db_conn))]
pub async fn get_dishes_sorted_by_price(db_conn: &SqlitePool) -> anyhow::Result<Dishes> {
    let dishes = sqlx::query_as::<_, Dish>(
        "SELECT id, name, price, isVeg FROM dishes ORDER BY price, id",
    )
    .fetch_all(db_conn)
    .await
    .context("fail to sort dishes by price")?;

    Ok(Dishes { dishes })
}
