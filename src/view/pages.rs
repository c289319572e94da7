//! Server-rendered storefront pages.
//!
//! HTML is assembled with `format!`; every interpolated value goes through
//! `html_escape::encode_text`. There is no template directory to ship.

use crate::config::StudioConfig;
use crate::model::product::Product;

fn esc(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Common shell: header with studio name, nav, service-area note, footer.
fn layout(studio: &StudioConfig, title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {studio_name}</title>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; }}
        nav a {{ margin-right: 16px; }}
        .note {{ background-color: #fff3cd; border: 1px solid #ffeaa7; color: #856404; padding: 10px; border-radius: 4px; margin: 16px 0; }}
        .product-card {{ border: 1px solid #dee2e6; border-radius: 8px; padding: 16px; margin: 12px 0; }}
        .price {{ font-weight: bold; }}
        footer {{ margin-top: 32px; font-size: 12px; color: #6c757d; }}
    </style>
</head>
<body>
    <header>
        <h1>{studio_name}</h1>
        <nav>
            <a href="/">Home</a>
            <a href="/shop">Shop</a>
            <a href="/services">Services</a>
            <a href="/contact">Contact</a>
        </nav>
    </header>
    <div class="note">{note}</div>
    <main>
{content}
    </main>
    <footer>{studio_name} &middot; {location}</footer>
</body>
</html>"#,
        title = esc(title),
        studio_name = esc(&studio.name),
        location = esc(&studio.location),
        note = esc(&studio.service_area_note()),
        content = content,
    )
}

fn product_card(product: &Product) -> String {
    let description = product
        .extra_text("description")
        .map(|d| format!("<p>{}</p>", esc(d)))
        .unwrap_or_default();
    format!(
        r#"        <div class="product-card">
            <h3><a href="/product/{id}">{name}</a></h3>
            {description}
            <p class="price">{price} {unit}</p>
        </div>"#,
        id = esc(&product.id),
        name = esc(&product.name),
        description = description,
        price = product.price,
        unit = esc(&product.unit),
    )
}

pub fn render_home(studio: &StudioConfig, featured: Option<&Product>, products: &[Product]) -> String {
    let featured_html = match featured {
        Some(p) => format!("<h2>Featured</h2>\n{}", product_card(p)),
        None => "<p>No products available yet. Please check back soon.</p>".to_string(),
    };
    let listing: String = products.iter().map(product_card).collect::<Vec<_>>().join("\n");
    let content = format!(
        "{featured}\n<h2>Our Products</h2>\n{listing}",
        featured = featured_html,
        listing = listing
    );
    layout(studio, "Home", &content)
}

pub fn render_shop(studio: &StudioConfig, products: &[Product]) -> String {
    let listing: String = products.iter().map(product_card).collect::<Vec<_>>().join("\n");
    let content = format!("<h2>Shop</h2>\n{}", listing);
    layout(studio, "Shop", &content)
}

pub fn render_product(studio: &StudioConfig, product: &Product) -> String {
    let description = product
        .extra_text("description")
        .map(|d| format!("<p>{}</p>", esc(d)))
        .unwrap_or_default();
    let content = format!(
        r#"        <h2>{name}</h2>
        {description}
        <p class="price">{price} {unit}</p>
        <form action="/order" method="post" enctype="multipart/form-data">
            <input type="hidden" name="product_id" value="{id}">
            <label>Name <input type="text" name="name" required></label><br>
            <label>Email <input type="email" name="email"></label><br>
            <label>Phone <input type="text" name="phone" required></label><br>
            <label>Address line 1 <input type="text" name="address_line1"></label><br>
            <label>Address line 2 <input type="text" name="address_line2"></label><br>
            <label>Locality <input type="text" name="locality"></label><br>
            <label>City <input type="text" name="city"></label><br>
            <label>Pincode <input type="text" name="pincode"></label><br>
            <label>Delivery method
                <select name="delivery_method">
                    <option value="home_delivery">Home delivery</option>
                    <option value="store_pickup">Store pickup</option>
                </select>
            </label><br>
            <label>Quantity <input type="text" name="quantity" value="1"></label><br>
            <label>Notes <textarea name="notes"></textarea></label><br>
            <label>Design files <input type="file" name="design_files" multiple></label><br>
            <button type="submit">Place Order</button>
        </form>"#,
        id = esc(&product.id),
        name = esc(&product.name),
        description = description,
        price = product.price,
        unit = esc(&product.unit),
    );
    layout(studio, &product.name, &content)
}

pub fn render_services(studio: &StudioConfig) -> String {
    let content = format!(
        r#"        <h2>Services</h2>
        <p>Printing, framing, and custom design work from our studio at {location}.</p>
        <p>Visit us or <a href="/contact">get in touch</a> to discuss your project.</p>"#,
        location = esc(&studio.location),
    );
    layout(studio, "Services", &content)
}

pub fn render_contact(studio: &StudioConfig) -> String {
    let content = format!(
        r#"        <h2>Contact</h2>
        <p>Find us at {location}.</p>
        <p>For orders outside our delivery area, contact us directly and we will work something out.</p>"#,
        location = esc(&studio.location),
    );
    layout(studio, "Contact", &content)
}

pub fn render_order_success(studio: &StudioConfig, product: &Product, customer_name: &str) -> String {
    let content = format!(
        r#"        <h2>Order received</h2>
        <p>Thank you, {name}! Your order for <strong>{product}</strong> has been sent to {studio_name}.</p>
        <p>We will contact you shortly to confirm the details.</p>
        <p><a href="/shop">Continue shopping</a></p>"#,
        name = esc(customer_name),
        product = esc(&product.name),
        studio_name = esc(&studio.name),
    );
    layout(studio, "Order received", &content)
}

pub fn render_order_error(studio: &StudioConfig, message: &str) -> String {
    let content = format!(
        r#"        <h2>Order not placed</h2>
        <p>{message}</p>
        <p><a href="/shop">Back to shop</a></p>"#,
        message = esc(message),
    );
    layout(studio, "Order not placed", &content)
}

/// Bare error page used when no studio context is available (catalog read
/// failures, malformed requests).
pub fn render_server_error(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Error</title></head>
<body>
    <h1>Error</h1>
    <p>{message}</p>
</body>
</html>"#,
        message = esc(message),
    )
}
