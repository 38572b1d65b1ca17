use crate::models::{Mechanic, Order, RepairJob, RouteStop, Vehicle};

/// The fields a free-text query is matched against. Fixed per entity type;
/// not configurable at call time.
pub trait Searchable {
    fn haystacks(&self) -> Vec<String>;
}

pub fn tokenize(query: &str) -> Vec<String> {
    query
        .trim()
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// OR across tokens, OR across fields: one token found as a substring of
/// one field is a match. An empty token list matches everything.
pub fn matches_tokens<T: Searchable>(record: &T, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }
    let haystacks: Vec<String> = record
        .haystacks()
        .into_iter()
        .map(|field| field.to_lowercase())
        .collect();
    tokens
        .iter()
        .any(|token| haystacks.iter().any(|field| field.contains(token)))
}

impl Searchable for Order {
    fn haystacks(&self) -> Vec<String> {
        let mut fields = vec![
            self.id.clone(),
            self.customer.clone(),
            self.address.clone(),
            self.status.as_str().to_string(),
        ];
        if let Some(driver) = &self.driver {
            fields.push(driver.clone());
        }
        if let Some(region) = &self.region {
            fields.push(region.clone());
        }
        fields
    }
}

impl Searchable for RouteStop {
    fn haystacks(&self) -> Vec<String> {
        vec![self.customer_name.clone(), self.address.clone()]
    }
}

impl Searchable for Vehicle {
    fn haystacks(&self) -> Vec<String> {
        vec![self.name.clone(), self.license_plate.clone()]
    }
}

impl Searchable for Mechanic {
    fn haystacks(&self) -> Vec<String> {
        vec![self.name.clone(), self.specialization.clone()]
    }
}

impl Searchable for RepairJob {
    fn haystacks(&self) -> Vec<String> {
        vec![self.description.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::{matches_tokens, tokenize};
    use crate::models::{Order, OrderStatus};
    use chrono::Utc;

    fn order(customer: &str, address: &str) -> Order {
        Order {
            id: "ORD-48213".to_string(),
            customer: customer.to_string(),
            items: 1,
            address: address.to_string(),
            status: OrderStatus::InTransit,
            scheduled_date: Utc::now(),
            driver: Some("James Wilson".to_string()),
            delivery_time: None,
            region: Some("North".to_string()),
        }
    }

    #[test]
    fn tokenizes_on_whitespace_and_lowercases() {
        assert_eq!(tokenize("  123   Main "), vec!["123", "main"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn any_token_in_any_field_matches() {
        let record = order("Corporate Customer 4", "123 Main St, New York");
        // "zzz" matches nothing, "main" matches the address.
        assert!(matches_tokens(&record, &tokenize("zzz main")));
        assert!(matches_tokens(&record, &tokenize("123 Main")));
        assert!(!matches_tokens(&record, &tokenize("zzz qqq")));
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        let record = order("Corporate Customer 4", "456 Oak Ave, Chicago");
        assert!(matches_tokens(&record, &tokenize("CORPORATE")));
        assert!(matches_tokens(&record, &tokenize("wilson")));
        assert!(matches_tokens(&record, &tokenize("north")));
        assert!(matches_tokens(&record, &tokenize("transit")));
    }

    #[test]
    fn empty_query_matches_everything() {
        let record = order("Individual Customer 9", "789 Pine Rd, Houston");
        assert!(matches_tokens(&record, &tokenize("")));
    }
}
