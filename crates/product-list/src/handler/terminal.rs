use crate::domain::response::{ProductListView, ProductRow};
use prometheus_client::{encoding::text::encode, registry::Registry};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    Delete(i32),
    Edit(i32),
    New,
    Metrics,
    Quit,
    Help,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or("").to_lowercase();
        let arg = parts.next();

        let id = |arg: Option<&str>| -> Result<i32, String> {
            arg.ok_or_else(|| format!("usage: {verb} <id>"))?
                .parse::<i32>()
                .map_err(|_| format!("invalid product id for {verb}"))
        };

        match verb.as_str() {
            "" | "list" | "ls" => Ok(Command::List),
            "refresh" | "r" => Ok(Command::Refresh),
            "delete" | "rm" => id(arg).map(Command::Delete),
            "edit" => id(arg).map(Command::Edit),
            "new" | "create" => Ok(Command::New),
            "metrics" => Ok(Command::Metrics),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "help" | "?" => Ok(Command::Help),
            other => Err(format!("unknown command '{other}', try 'help'")),
        }
    }
}

fn render_row(out: &mut String, row: &ProductRow) {
    let _ = writeln!(out, "#{} {}", row.id, row.title);
    if let Some(image) = &row.image {
        let _ = writeln!(out, "    image: {}", image.src);
    }

    let _ = write!(out, "    {} | {}", row.sku, row.quantity);
    if let Some(active) = &row.active_label {
        let _ = write!(out, "  [{active}]");
    }
    out.push('\n');

    let _ = writeln!(out, "    Price: {}", row.price);
    if let Some(sale) = &row.sale {
        let _ = writeln!(out, "    Sale: {sale}");
    }

    let _ = writeln!(out, "    Created: {}", row.created);
    if let Some(updated) = &row.updated {
        let _ = writeln!(out, "    Updated: {updated}");
    }

    let _ = writeln!(out, "    {}: {}", row.edit.label, row.edit.route);
}

pub fn render_text(view: &ProductListView) -> String {
    let mut out = String::new();

    match view {
        ProductListView::Loading { label } => {
            let _ = writeln!(out, "{label}");
        }
        ProductListView::Empty {
            message,
            create_label,
            create,
        } => {
            let _ = writeln!(out, "{message} {create_label}: {create}");
        }
        ProductListView::Populated { rows } => {
            for row in rows {
                render_row(&mut out, row);
            }
        }
    }

    out
}

/// OpenMetrics text exposition of everything registered in `registry`.
pub fn render_metrics(registry: &Registry) -> String {
    let mut buffer = String::new();
    if let Err(e) = encode(&mut buffer, registry) {
        return format!("Failed to encode metrics: {e}\n");
    }
    buffer
}
