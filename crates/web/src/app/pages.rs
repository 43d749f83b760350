//! Server-rendered HTML pages.
//!
//! Pages are assembled with `format!` over a shared layout. All
//! user-supplied text goes through [`escape`] before it reaches markup.

use axum::response::Html;
use stockyard_warehouse::{Warehouse, WarehouseId};

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{title}</title></head>
<body>
{body}</body>
</html>
"#
    ))
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(reason) => format!("<p class=\"error\">{}</p>\n", escape(reason)),
        None => String::new(),
    }
}

/// The landing page: every warehouse with a link to its detail page.
pub fn index(entries: &[(WarehouseId, Warehouse)]) -> Html<String> {
    let listing = if entries.is_empty() {
        "<p>No warehouses yet.</p>\n".to_string()
    } else {
        let mut items = String::from("<ul>\n");
        for (id, warehouse) in entries {
            items.push_str(&format!(
                "<li><a href=\"/warehouse/{id}\">{}</a>: {}</li>\n",
                escape(warehouse.name()),
                warehouse.stock()
            ));
        }
        items.push_str("</ul>\n");
        items
    };

    let body = format!(
        "<h1>Warehouse Management</h1>\n{listing}<p><a href=\"/warehouse/create\">Create New Warehouse</a></p>\n"
    );
    layout("Warehouse Management", &body)
}

/// The create form, optionally with a validation error above it.
pub fn create(error: Option<&str>) -> Html<String> {
    let body = format!(
        r#"<h1>Create New Warehouse</h1>
{}<form method="post" action="/warehouse/create">
<p><label>Name <input type="text" name="name"></label></p>
<p><label>Capacity <input type="text" name="capacity" value="0"></label></p>
<p><label>Initial level <input type="text" name="initial_level" value="0"></label></p>
<p><button type="submit">Create</button></p>
</form>
<p><a href="/">Back to warehouses</a></p>
"#,
        error_banner(error)
    );
    layout("Create New Warehouse", &body)
}

/// One warehouse: its numbers plus the add/remove/edit/delete controls.
pub fn show(id: WarehouseId, warehouse: &Warehouse) -> Html<String> {
    let name = escape(warehouse.name());
    let stock = warehouse.stock();
    let body = format!(
        r#"<h1>{name}</h1>
<p>Capacity: {capacity}</p>
<p>Level: {level}</p>
<p>Space left: {space}</p>
<form method="post" action="/warehouse/{id}/add">
<p><label>Amount <input type="text" name="amount" value="0"></label>
<button type="submit">Add stock</button></p>
</form>
<form method="post" action="/warehouse/{id}/remove">
<p><label>Amount <input type="text" name="amount" value="0"></label>
<button type="submit">Remove stock</button></p>
</form>
<p><a href="/warehouse/{id}/edit">Edit</a></p>
<form method="post" action="/warehouse/{id}/delete">
<p><button type="submit">Delete</button></p>
</form>
<p><a href="/">Back to warehouses</a></p>
"#,
        capacity = stock.capacity(),
        level = stock.level(),
        space = stock.remaining_capacity(),
    );
    layout(&name, &body)
}

/// The edit form, prefilled with the stored name and capacity.
pub fn edit(id: WarehouseId, warehouse: &Warehouse, error: Option<&str>) -> Html<String> {
    let body = format!(
        r#"<h1>Edit Warehouse</h1>
{banner}<form method="post" action="/warehouse/{id}/edit">
<p><label>Name <input type="text" name="name" value="{name}"></label></p>
<p><label>Capacity <input type="text" name="capacity" value="{capacity}"></label></p>
<p><button type="submit">Save</button></p>
</form>
<p><a href="/warehouse/{id}">Back to warehouse</a></p>
"#,
        banner = error_banner(error),
        name = escape(warehouse.name()),
        capacity = warehouse.stock().capacity(),
    );
    layout("Edit Warehouse", &body)
}
