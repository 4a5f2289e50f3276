use serde::de::Error;
use serde::Deserializer;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::trivia::CategoryFilter;

// the quiz page sends the category id either as a number or as the string it
// read from the select box, with 0 standing for "all categories"
pub fn deserialize_category_filter<'de, D>(deserializer: D) -> Result<CategoryFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let id: i64 = deserialize_number_from_string(deserializer)?;
    if id < 0 {
        return Err(D::Error::custom(format!("invalid category id {id}")));
    }
    Ok(CategoryFilter::from(id))
}
