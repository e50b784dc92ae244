use crate::models::recipe_model::ShoppingListItem;
use printpdf::{BuiltinFont, Mm, PdfDocument};

/// Render the aggregated shopping list as a single-column A4 document.
/// Long lists continue on extra pages.
pub fn render(
    username: &str,
    generated_at: &str,
    items: &[ShoppingListItem],
) -> Result<Vec<u8>, String> {
    let (doc, page, layer) = PdfDocument::new("Shopping list", Mm(210.0), Mm(297.0), "Layer 1");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| e.to_string())?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| e.to_string())?;

    let mut current = doc.get_page(page).get_layer(layer);

    current.use_text("Shopping list", 16.0, Mm(20.0), Mm(272.0), &bold);
    current.use_text(
        format!("{} * {}", username, generated_at),
        10.0,
        Mm(20.0),
        Mm(263.0),
        &regular,
    );

    let mut y = 250.0;
    for (idx, item) in items.iter().enumerate() {
        if y < 20.0 {
            let (next_page, next_layer) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = 272.0;
        }

        let line = format!(
            "{}. {} - {} {}",
            idx + 1,
            item.name,
            item.amount,
            item.measurement_unit
        );
        current.use_text(line, 12.0, Mm(20.0), Mm(y), &regular);
        y -= 8.0;
    }

    doc.save_to_bytes().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, unit: &str, amount: i64) -> ShoppingListItem {
        ShoppingListItem {
            name: name.to_string(),
            measurement_unit: unit.to_string(),
            amount,
        }
    }

    #[test]
    fn renders_a_pdf_document() {
        let items = vec![
            item("flour", "g", 300),
            item("egg", "pcs", 2),
            item("milk", "l", 1),
        ];

        let bytes = render("chef", "01/02/2026 12:00", &items).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_lists_overflow_to_extra_pages() {
        let items: Vec<_> = (0..150)
            .map(|i| item(&format!("ingredient {}", i), "g", i + 1))
            .collect();

        let bytes = render("chef", "01/02/2026 12:00", &items).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn handles_empty_list() {
        let bytes = render("chef", "01/02/2026 12:00", &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
