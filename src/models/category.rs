//! Expense categories
//!
//! The category set is closed. [`CategoryMap`] is a total mapping with one
//! slot per category, so every budget and every analysis always carries all
//! eight entries.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// An expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Healthcare,
    Education,
    Other,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Healthcare,
        Category::Education,
        Category::Other,
    ];

    /// Every category sorted by name
    pub const BY_NAME: [Category; 8] = [
        Category::Bills,
        Category::Education,
        Category::Entertainment,
        Category::Food,
        Category::Healthcare,
        Category::Other,
        Category::Shopping,
        Category::Transport,
    ];

    /// Category name as used in JSON keys and CSV cells
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == trimmed)
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// Error for a category name outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            Category::ALL.map(|c| c.name()).join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

/// Total mapping from every [`Category`] to a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryMap<T> {
    slots: [T; 8],
}

impl<T: Default> CategoryMap<T> {
    /// A map with the default value in every slot
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
        }
    }
}

impl<T> CategoryMap<T> {
    /// Build a map by evaluating `f` for every category
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            slots: Category::ALL.map(&mut f),
        }
    }

    /// Value for a category
    pub fn get(&self, category: Category) -> &T {
        &self.slots[category.index()]
    }

    /// Replace the value for a category
    pub fn set(&mut self, category: Category, value: T) {
        self.slots[category.index()] = value;
    }

    /// Iterate in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.slots.iter())
    }

    /// Iterate sorted by category name
    pub fn iter_by_name(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::BY_NAME.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Iterate over the values in category order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        &self.slots[category.index()]
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        &mut self.slots[category.index()]
    }
}

impl<T: Serialize> Serialize for CategoryMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (category, value) in self.iter_by_name() {
            map.serialize_entry(category.name(), value)?;
        }
        map.end()
    }
}

// Missing categories fall back to the default value; unknown keys are rejected.
impl<'de, T> Deserialize<'de> for CategoryMap<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryMapVisitor(PhantomData))
    }
}

struct CategoryMapVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for CategoryMapVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = CategoryMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map keyed by category name")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = CategoryMap::new();
        while let Some(key) = access.next_key::<String>()? {
            let category = Category::from_str(&key).map_err(de::Error::custom)?;
            map.set(category, access.next_value()?);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Bills ".parse::<Category>().unwrap(), Category::Bills);
        assert!("Groceries".parse::<Category>().is_err());
        assert!("food".parse::<Category>().is_err());
    }

    #[test]
    fn test_all_order() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Food",
                "Transport",
                "Shopping",
                "Entertainment",
                "Bills",
                "Healthcare",
                "Education",
                "Other"
            ]
        );
    }

    #[test]
    fn test_map_serializes_every_category() {
        let mut map: CategoryMap<u32> = CategoryMap::new();
        map[Category::Food] = 3;

        let json = serde_json::to_value(map).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        assert_eq!(obj["Food"], 3);
        assert_eq!(obj["Other"], 0);
    }

    #[test]
    fn test_by_name_is_sorted() {
        let names: Vec<_> = Category::BY_NAME.iter().map(|c| c.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_map_serializes_keys_by_name() {
        let map: CategoryMap<u32> = CategoryMap::from_fn(|c| c.index() as u32);
        let json = serde_json::to_string(&map).unwrap();
        let bills = json.find("\"Bills\"").unwrap();
        let food = json.find("\"Food\"").unwrap();
        let transport = json.find("\"Transport\"").unwrap();
        assert!(bills < food && food < transport);
    }

    #[test]
    fn test_map_deserialize_fills_missing() {
        let map: CategoryMap<u32> = serde_json::from_str(r#"{"Transport": 5}"#).unwrap();
        assert_eq!(map[Category::Transport], 5);
        assert_eq!(map[Category::Food], 0);
    }

    #[test]
    fn test_map_rejects_unknown_key() {
        let result: Result<CategoryMap<u32>, _> = serde_json::from_str(r#"{"Pets": 5}"#);
        assert!(result.is_err());
    }
}
