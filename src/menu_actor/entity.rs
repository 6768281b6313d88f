//! [`ActorEntity`] implementation for [`MenuItem`].

use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::ActorEntity;

fn check_price(price: f64) -> Result<(), MenuError> {
    if !price.is_finite() || price < 0.0 {
        return Err(MenuError::ValidationError(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::ValidationError("name must not be empty".into()));
    }
    Ok(())
}

impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        check_name(&params.name)?;
        check_price(params.price)?;
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
        })
    }

    /// Applies the fields that are set. Validation runs before anything is assigned, so
    /// a rejected update changes nothing.
    fn on_update(&mut self, update: MenuItemUpdate) -> Result<(), MenuError> {
        if let Some(name) = &update.name {
            check_name(name)?;
        }
        if let Some(price) = update.price {
            check_price(price)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn espresso() -> MenuItem {
        MenuItem::from_create_params(MenuItemId(1), MenuItemCreate::new("Espresso", 2.5)).unwrap()
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result =
            MenuItem::from_create_params(MenuItemId(1), MenuItemCreate::new("Espresso", -1.0));
        assert!(matches!(result, Err(MenuError::ValidationError(_))));
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut item = espresso();
        item.on_update(MenuItemUpdate::price(3.0)).unwrap();
        assert_eq!(item.price, 3.0);
        assert_eq!(item.name, "Espresso");
    }

    #[test]
    fn test_rejected_update_changes_nothing() {
        let mut item = espresso();
        let update = MenuItemUpdate {
            name: Some("Ristretto".into()),
            price: Some(f64::NAN),
            ..MenuItemUpdate::default()
        };
        assert!(item.on_update(update).is_err());
        assert_eq!(item, espresso());
    }
}
