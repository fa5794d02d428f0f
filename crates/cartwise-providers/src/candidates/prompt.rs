//! Complementary-product prompt construction
//!
//! Renders the structured request sent to the generative model. The
//! taxonomy is rendered in sorted category order so the same inputs
//! always produce the same prompt text.

use cartwise_domain::constants::CANDIDATE_SCORE_NOMINAL_FLOOR;
use cartwise_domain::value_objects::CategoryTaxonomy;

/// Build the candidate-generation prompt for one product
///
/// The prompt constrains the model to at most five specific item types
/// plausibly belonging under the taxonomy labels (never the labels
/// themselves), scored in the nominal [0.80, 1.00] band with a 0.85
/// floor, sorted descending, substitutes excluded, emitted as JSON
/// matching the response schema.
pub fn build_prompt(product_name: &str, taxonomy: &CategoryTaxonomy) -> String {
    format!(
        r#"You are a retail recommendation expert specializing in identifying complementary products for items sold on an e-commerce platform.

CONTEXT:
- Original Product: {product_name}
- Available Categories:
{categories}

Your task is to suggest up to 5 complementary products that are typically purchased, worn, or used together with the original product. Your recommendations must be selected only from the provided categories. Rank them in decreasing order of complementary relevance.

Focus your suggestions on:
- Functional utility (e.g., matching bottomwear, required underlayers)
- Styling and enhancement (e.g., accessories, color coordination)
- Target usage (festive, daily wear, casual, formal, age relevance)
- The original product's intended gender, style, and cultural context

INSTRUCTIONS:
- Only recommend items from the listed categories
- Do NOT include substitutes or near-identical products
- Do NOT include items from categories not listed
- Prioritize items that help complete, accessorize, or enhance the product
- For recommended products, use specific item names or types (e.g., "Slim Fit Chinos", "Statement Necklace") rather than just the general category name (e.g., not just "Bottoms - Men", "Necklaces")

SCORING:
- Assign a complementary score between {score_floor:.2} and 1.00
- Only include items with a score >= 0.85, unless slightly lower but very relevant
- Fewer than 5 is okay - precision matters more than quantity
- List in descending order of complementary score

EXAMPLES:

1. Original: Luxury Moisturizing Shampoo (500ml)
   Categories:
   - Personal Care: ["Conditioners", "Hair Masks", "Serums", "Body Wash"]
   - Accessories: ["Hairbands", "Clips"]
   - Appliances: ["Hair Dryers", "Straighteners"]

   Suggested: "Matching Deep Conditioner" (a rich, hydrating conditioner formulated to work with the shampoo, 0.96); "Leave-In Hair Serum" (lightweight serum that smooths hair and tames frizz post-wash, 0.89)

2. Original: Men's Casual Cotton T-Shirt
   Categories:
   - Apparel: ["Jeans", "Shorts", "Jackets", "Sweatshirts"]
   - Accessories: ["Sneakers", "Caps", "Socks", "Belts"]

   Suggested: "Comfort Fit Denim Jeans" (classic blue jeans with a relaxed fit for everyday comfort, 0.96); "White Casual Sneakers" (lightweight lace-up shoes that suit casual and semi-casual wear, 0.91)

OUTPUT FORMAT:
Respond with a JSON object only, no prose, matching exactly:
{{"complementary_products": [{{"product_name": "...", "product_description": "1-2 lines describing the item itself", "score": 0.0}}]}}

Do not explain how each item complements the original product."#,
        product_name = product_name,
        categories = render_taxonomy(taxonomy),
        score_floor = CANDIDATE_SCORE_NOMINAL_FLOOR,
    )
}

/// Render the taxonomy as one bullet line per category
fn render_taxonomy(taxonomy: &CategoryTaxonomy) -> String {
    taxonomy
        .iter()
        .map(|(category, labels)| {
            let quoted: Vec<String> = labels.iter().map(|l| format!("\"{l}\"")).collect();
            format!("- {category}: [{}]", quoted.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_product_and_taxonomy() {
        let taxonomy = CategoryTaxonomy::from_entries([
            ("Apparel", vec!["Jeans", "Shorts"]),
            ("Accessories", vec!["Sneakers"]),
        ]);
        let prompt = build_prompt("Men's Casual Cotton T-Shirt", &taxonomy);

        assert!(prompt.contains("Original Product: Men's Casual Cotton T-Shirt"));
        assert!(prompt.contains("- Apparel: [\"Jeans\", \"Shorts\"]"));
        assert!(prompt.contains("- Accessories: [\"Sneakers\"]"));
        assert!(prompt.contains("complementary_products"));
    }

    #[test]
    fn prompt_states_the_nominal_score_floor() {
        let taxonomy = CategoryTaxonomy::from_entries([("Apparel", vec!["Jeans"])]);
        let prompt = build_prompt("T-Shirt", &taxonomy);
        assert!(prompt.contains("between 0.80 and 1.00"));
    }

    #[test]
    fn taxonomy_rendering_is_deterministic() {
        let taxonomy = CategoryTaxonomy::from_entries([
            ("Zeta", vec!["z"]),
            ("Alpha", vec!["a"]),
        ]);
        let rendered = render_taxonomy(&taxonomy);
        // BTreeMap ordering: Alpha before Zeta, every run
        assert!(rendered.find("Alpha").unwrap() < rendered.find("Zeta").unwrap());
    }
}
