use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};

use bookadvisor::config::{load_config, AppConfig};
use bookadvisor::observability::init_logging;
use bookadvisor::routing::{Params, Revision, RouteTarget, Router};

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect the book advisor route table", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Serve this revision instead of the configured one.
    #[arg(short, long)]
    revision: Option<Revision>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in declaration order
    Routes,
    /// Resolve a path to a page and parameters
    Resolve {
        path: String,
        /// Treat the path as a full address that includes the base path
        #[arg(long)]
        location: bool,
    },
    /// Build a path from a route name and key=value parameters
    Reverse {
        name: String,
        params: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(revision) = cli.revision {
        config.router.revision = revision;
        config.router.routes.clear();
    }
    init_logging(&config.observability)?;

    let router = config.router.build()?;

    let output = match cli.command {
        Commands::Routes => list_routes(&router),
        Commands::Resolve { path, location } => {
            let resolution = if location {
                router.resolve_location(&path)
            } else {
                router.resolve(&path)
            };
            serde_json::to_value(resolution)?
        }
        Commands::Reverse { name, params } => {
            let params = parse_params(&params)?;
            let path = router.reverse(&name, &params)?;
            json!({ "name": name, "path": path, "href": router.href(&path) })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[derive(Serialize)]
struct RouteEntry<'a> {
    name: &'a str,
    path: &'a str,
    #[serde(flatten)]
    target: &'a RouteTarget,
}

fn list_routes(router: &Router) -> Value {
    let routes: Vec<RouteEntry<'_>> = router
        .routes()
        .iter()
        .map(|route| RouteEntry {
            name: route.name(),
            path: route.pattern().as_str(),
            target: route.target(),
        })
        .collect();
    json!({ "base_path": router.base_path(), "routes": routes })
}

fn parse_params(raw: &[String]) -> Result<Params, String> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| format!("expected key=value, got `{pair}`"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let params = parse_params(&["id=42".to_string(), "tab=a=b".to_string()]).unwrap();
        assert_eq!(params["id"], "42");
        assert_eq!(params["tab"], "a=b");
        assert!(parse_params(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_params_rejects_missing_equals() {
        let err = parse_params(&["id=1".to_string(), "id".to_string()]).unwrap_err();
        assert_eq!(err, "expected key=value, got `id`");
    }

    #[test]
    fn test_list_routes_keeps_target_keys() {
        let router = Revision::DefaultRedirect.router("/").unwrap();
        let json = list_routes(&router);
        assert_eq!(json["base_path"], "/");
        assert_eq!(json["routes"][0]["name"], "home");
        assert_eq!(json["routes"][0]["redirect"], "/project/0");
        assert_eq!(json["routes"][1]["path"], "/project/:id");
        assert_eq!(json["routes"][1]["page"], "project");
    }
}
