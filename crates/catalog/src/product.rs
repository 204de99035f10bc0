use serde::{Deserialize, Serialize};

use paintshop_core::{Entity, ProductId};

use crate::facet::{AreaId, CategoryId, ColorId, Facet, FacetValue, FinishId};

/// Catalog product as delivered by the data source (read-only to the engine).
///
/// Field names follow the products table; `category` is accepted as an alias
/// for `product_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(alias = "category")]
    pub product_type: CategoryId,
    pub area: AreaId,
    pub finish: FinishId,
    pub color: ColorId,
    pub price: f64,
}

impl Product {
    /// The product's value for a discrete facet (`None` for the price facet).
    pub fn discrete_value(&self, facet: Facet) -> Option<FacetValue> {
        match facet {
            Facet::ProductType => Some(FacetValue::ProductType(self.product_type.clone())),
            Facet::Area => Some(FacetValue::Area(self.area.clone())),
            Facet::Finish => Some(FacetValue::Finish(self.finish.clone())),
            Facet::Color => Some(FacetValue::Color(self.color.clone())),
            Facet::Price => None,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::product;

    #[test]
    fn deserializes_from_table_row() {
        let row = serde_json::json!({
            "id": "01890a5d-ac96-774b-bcce-b302099a8057",
            "name": "Kitchen & Bath Satin",
            "category": "interior-paint",
            "area": "bathrooms-kitchens",
            "finish": "satin",
            "color": "white",
            "price": 42.9
        });
        let p: Product = serde_json::from_value(row).unwrap();
        assert_eq!(p.product_type.as_str(), "interior-paint");
        assert_eq!(p.price, 42.9);
    }

    #[test]
    fn rejects_row_with_malformed_facet_slug() {
        let row = serde_json::json!({
            "id": "01890a5d-ac96-774b-bcce-b302099a8057",
            "name": "Broken",
            "product_type": "Interior Paint",
            "area": "walls",
            "finish": "matt",
            "color": "white",
            "price": 10.0
        });
        assert!(serde_json::from_value::<Product>(row).is_err());
    }

    #[test]
    fn discrete_value_maps_each_facet() {
        let p = product("primer", "metal", "matt", "grey", 19.0);
        assert_eq!(
            p.discrete_value(Facet::Area),
            Some(FacetValue::Area(AreaId::new("metal").unwrap()))
        );
        assert_eq!(p.discrete_value(Facet::Price), None);
        assert_eq!(Entity::id(&p), &p.id);
    }
}
