use serde::{Deserialize, Serialize};

/// One ingredient to buy, already scaled to the party size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Shopping list as produced by the recipe generator, bucketed by kind of shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(rename = "VegetableShop", default)]
    pub vegetable_shop: Vec<Ingredient>,
    #[serde(rename = "GroceryShop", default)]
    pub grocery_shop: Vec<Ingredient>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.vegetable_shop.is_empty() && self.grocery_shop.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
}

/// Full recipe generator output. Only the shopping list is used downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub recipe_title: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub substitutions: Vec<String>,
    pub shopping_list: ShoppingList,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ShoppingListSource {
    Recipe(Box<RecipeResponse>),
    List(ShoppingList),
}

/// Extracts the shopping list from either a full recipe response or a bare list.
pub fn parse_shopping_list(json: &str) -> Result<ShoppingList, serde_json::Error> {
    Ok(match serde_json::from_str(json)? {
        ShoppingListSource::Recipe(recipe) => recipe.shopping_list,
        ShoppingListSource::List(list) => list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recipe_response() {
        let json = r#"{
            "recipeTitle": "Tomato Soup",
            "cookTime": "30 mins",
            "nutrition": {"calories": "120", "protein": "3g", "carbs": "20g", "fat": "4g"},
            "ingredients": [{"name": "Tomato", "amount": "4"}],
            "steps": ["Chop", "Boil"],
            "substitutions": [],
            "shoppingList": {
                "VegetableShop": [{"name": "Tomato", "quantity": 4, "unit": "pcs"}],
                "GroceryShop": [{"name": "Salt", "quantity": 1, "unit": "tsp"}]
            }
        }"#;
        let list = parse_shopping_list(json).unwrap();
        assert_eq!(list.vegetable_shop, vec![Ingredient::new("Tomato", 4.0, "pcs")]);
        assert_eq!(list.grocery_shop[0].name, "Salt");
    }

    #[test]
    fn parses_bare_list_with_missing_bucket() {
        let list = parse_shopping_list(r#"{"GroceryShop": [{"name": "Rice", "quantity": 0.5, "unit": "kg"}]}"#).unwrap();
        assert!(list.vegetable_shop.is_empty());
        assert_eq!(list.grocery_shop.len(), 1);
    }

    #[test]
    fn rejects_other_json() {
        assert!(parse_shopping_list("[1, 2, 3]").is_err());
    }
}
