mod meal_db;

pub use self::meal_db::MealDbClient;
