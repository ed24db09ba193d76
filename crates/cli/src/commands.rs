use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use campus_auth::{Action, Module, PolicyEngine, PolicyReport, Role, StaffContext, StaffRecord};
use campus_core::StaffId;

#[derive(Parser, Debug)]
#[command(name = "campus-policy")]
#[command(about = "Inspect and query the staff portal access policy")]
pub struct Cli {
    /// JSON file of extra job-title aliases (overrides CAMPUS_ROLE_ALIASES)
    #[arg(long, global = true)]
    pub aliases: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Resolve a job title to a role
    Resolve {
        position: String,

        /// Staff identifier recorded in security logs
        #[arg(long, default_value = "cli")]
        staff_id: String,
    },

    /// Decide whether a job title may perform an action on a module
    Check {
        position: String,
        module: Module,
        action: Action,

        /// Staff identifier recorded in security logs
        #[arg(long, default_value = "cli")]
        staff_id: String,
    },

    /// Show the grouped menu a job title would see
    Menu {
        position: String,

        /// Staff identifier recorded in security logs
        #[arg(long, default_value = "cli")]
        staff_id: String,
    },

    /// Dump the full policy (roles, aliases, grants)
    Dump,

    /// Validate the policy and exit
    Validate,
}

pub fn run(command: &Command, engine: &PolicyEngine, out: &mut impl Write) -> anyhow::Result<()> {
    let value = match command {
        Command::Resolve { position, staff_id } => {
            let ctx = establish(engine, staff_id, position)?;
            json!({ "position": position, "resolution": ctx.resolution() })
        }
        Command::Check {
            position,
            module,
            action,
            staff_id,
        } => {
            let ctx = establish(engine, staff_id, position)?;
            let decision = engine.matrix().explain(ctx.role(), *module, *action);
            json!({ "context": ctx, "decision": decision })
        }
        Command::Menu { position, staff_id } => {
            let ctx = establish(engine, staff_id, position)?;
            json!({
                "resolution": ctx.resolution(),
                "groups": engine.matrix().menu_groups(ctx.role()),
            })
        }
        Command::Dump => serde_json::to_value(PolicyReport::build(engine.matrix(), engine.aliases()))?,
        Command::Validate => {
            engine.matrix().validate()?;
            json!({
                "status": "ok",
                "roles": Role::ALL.len(),
                "modules": Module::ALL.len(),
                "aliases": engine.aliases().len(),
            })
        }
    };

    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}

/// Every position goes through the engine so unrecognised titles are logged.
fn establish(engine: &PolicyEngine, staff_id: &str, position: &str) -> anyhow::Result<StaffContext> {
    let record = StaffRecord {
        id: StaffId::new(staff_id)?,
        position: position.to_string(),
    };
    Ok(engine.establish(&record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> serde_json::Value {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let engine = PolicyEngine::standard().unwrap();
        let mut buf = Vec::new();
        run(&cli.command, &engine, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn parses_catalog_names() {
        let cli = Cli::try_parse_from(["campus-policy", "check", "Kế toán", "invoices", "delete"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Check {
                position: "Kế toán".to_string(),
                module: Module::Invoices,
                action: Action::Delete,
                staff_id: "cli".to_string(),
            }
        );
        assert!(Cli::try_parse_from(["campus-policy", "check", "Admin", "invoice", "delete"]).is_err());
        assert!(Cli::try_parse_from(["campus-policy", "check", "Admin", "invoices", "read"]).is_err());
    }

    #[test]
    fn check_reports_decision_and_directives() {
        let out = run_args(&["campus-policy", "check", "Front-desk", "invoices", "delete"]);
        assert_eq!(out["decision"]["granted"], false);
        assert_eq!(out["decision"]["directives"]["requires_approval"], true);
        assert_eq!(out["context"]["resolution"]["role"], "front_office");
    }

    #[test]
    fn resolve_reports_fallback() {
        let out = run_args(&["campus-policy", "resolve", "Some Unknown Title"]);
        assert_eq!(out["resolution"]["status"], "fallback");
        assert_eq!(out["resolution"]["role"], "teaching_assistant");
    }

    #[test]
    fn menu_lists_groups_for_role() {
        let out = run_args(&["campus-policy", "menu", "Admin"]);
        assert_eq!(out["resolution"]["status"], "matched");
        assert_eq!(out["resolution"]["role"], "administrator");
        assert_eq!(out["groups"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn menu_reports_fallback_for_unknown_title() {
        let out = run_args(&["campus-policy", "menu", "Some Unknown Title"]);
        assert_eq!(out["resolution"]["status"], "fallback");
        assert_eq!(out["resolution"]["role"], "teaching_assistant");
        let groups: Vec<&str> = out["groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["group"].as_str().unwrap())
            .collect();
        assert!(!groups.contains(&"finance"));
    }

    #[test]
    fn resolve_and_menu_reject_blank_staff_id() {
        let engine = PolicyEngine::standard().unwrap();
        for args in [
            ["campus-policy", "resolve", "Admin", "--staff-id", ""],
            ["campus-policy", "menu", "Admin", "--staff-id", ""],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(run(&cli.command, &engine, &mut Vec::new()).is_err());
        }
    }

    #[test]
    fn validate_and_dump_succeed() {
        let out = run_args(&["campus-policy", "validate"]);
        assert_eq!(out["status"], "ok");
        assert_eq!(out["modules"], Module::COUNT);

        let out = run_args(&["campus-policy", "dump"]);
        assert_eq!(out["roles"].as_array().unwrap().len(), Role::COUNT);
    }

    #[test]
    fn blank_staff_id_is_rejected() {
        let cli = Cli::try_parse_from(["campus-policy", "check", "Admin", "settings", "view", "--staff-id", ""]).unwrap();
        let engine = PolicyEngine::standard().unwrap();
        assert!(run(&cli.command, &engine, &mut Vec::new()).is_err());
    }
}
