use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storefront::{init_widgets, MemoryStore, Product, RenderContext, RequestInfo, WidgetType};
use storefront_types::WidgetSettings;

/// storefront - Inspect and exercise the widget registry
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=warn, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered widgets, groups, scopes, and editor elements
    List,
    /// Validate a settings JSON file against a widget type
    Validate {
        /// Widget name (e.g. SlideShow)
        widget: String,
        /// Path of the settings JSON file
        file: PathBuf,
    },
    /// Build a render context for a widget and print its options as JSON
    Render {
        /// Widget name (e.g. Products)
        widget: String,
        /// Path of the settings JSON file
        file: PathBuf,
        /// JSON file with product records backing the in-memory store
        #[arg(long, value_name = "FILE")]
        products: Option<PathBuf>,
        /// Query parameter of the simulated request (KEY or KEY=VALUE, repeatable)
        #[arg(short = 'q', long = "query", value_name = "KEY[=VALUE]", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },
}

/// Parse a query argument "key" or "key=value" into a pair
fn parse_query_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        // A bare key still counts as present, e.g. ?from_google
        None => Ok((s.to_string(), String::new())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let registry = init_widgets();

    match cli.command {
        Command::List => {
            println!("Widgets:");
            for name in registry.list_widgets() {
                let widget = registry.create_widget(&name)?;
                let definition = widget.definition();
                let group = definition.group.as_deref().unwrap_or("-");
                println!(
                    "  {:<14} group: {:<10} templates: {}",
                    definition.name,
                    group,
                    definition.templates.join(", ")
                );
            }
            println!("Groups:");
            for name in registry.list_groups() {
                let group = registry.group(&name).expect("listed group exists");
                println!("  {:<14} members: {}", group.name, group.widgets.join(", "));
            }
            println!("Scopes:");
            for name in registry.list_scopes() {
                println!("  {}", name);
            }
            println!("Editor elements:");
            for name in registry.list_elements() {
                println!("  {}", name);
            }
        }
        Command::Validate { widget, file } => {
            let widget = registry.create_widget(&widget)?;
            let settings = load_settings(widget.as_ref(), &file)?;
            widget.validate(&settings)?;
            println!("{}: settings are valid", widget.definition().name);
        }
        Command::Render {
            widget,
            file,
            products,
            query,
        } => {
            let widget = registry.create_widget(&widget)?;
            let settings = load_settings(widget.as_ref(), &file)?;

            let store = match products {
                Some(path) => load_products(&path)?,
                None => MemoryStore::new(),
            };

            let mut request = RequestInfo::new("/");
            for (key, value) in query {
                request = request.with_query_param(key, value);
            }

            let mut context = RenderContext::new()
                .with_request(request)
                .with_store(Arc::new(store));
            widget.build_context(&mut context, &settings)?;
            info!(
                "built context for {} with {} options",
                widget.definition().name,
                context.options.len()
            );
            println!("{}", serde_json::to_string_pretty(&context.options)?);
        }
    }

    Ok(())
}

fn load_settings(widget: &dyn WidgetType, path: &Path) -> Result<WidgetSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let widget_type = widget.default_settings().widget_type();
    WidgetSettings::from_value_for_type(widget_type, value)
        .ok_or_else(|| anyhow!("{} is not valid {} settings", path.display(), widget_type))
}

fn load_products(path: &Path) -> Result<MemoryStore> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading products file {}", path.display()))?;
    let products: Vec<Product> = serde_json::from_str(&content)?;
    Ok(MemoryStore::with_products(products))
}
