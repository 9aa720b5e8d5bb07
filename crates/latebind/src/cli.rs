//! Command line interface
//!
//! Every command runs as one request: a scope is created, the handler runs
//! and the scope is disposed.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use latebind_domain::error::Result;
use latebind_infrastructure::{Composition, ErrorContext};
use serde_json::Value;
use tracing::info;

use crate::handlers::{ManualPaymentController, PartnerController, PaymentController};

/// Command line interface for latebind
#[derive(Parser, Debug)]
#[command(name = "latebind")]
#[command(about = "latebind - Scoped late-bound dependency resolution")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Commands, each handled as one request
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read a partner's payment and print the derived payment
    Payment {
        /// Partner name
        partner: String,
        /// Payment id
        id: i32,
        /// Build the repository per call instead of through the scope
        #[arg(long)]
        manual: bool,
    },
    /// Resolve and print a partner's context
    Context {
        /// Partner name
        partner: String,
    },
    /// Print the wiring table
    Registrations,
}

/// Run `command` against `composition` and return its JSON output
pub async fn execute(command: &Command, composition: &Composition) -> Result<Value> {
    match command {
        Command::Payment {
            partner,
            id,
            manual: true,
        } => {
            let payment = ManualPaymentController::from_composition(composition)
                .get_payment(partner, *id)
                .await?;
            to_json(&payment)
        }
        Command::Payment { partner, id, .. } => {
            let scope = composition.create_scope();
            info!(scope = %scope.id(), "Handling payment request");
            let payment = PaymentController::from_scope(&scope)
                .get_payment(partner, *id)
                .await?;
            scope.dispose();
            to_json(&payment)
        }
        Command::Context { partner } => {
            let scope = composition.create_scope();
            info!(scope = %scope.id(), "Handling context request");
            let context = PartnerController::from_scope(&scope)
                .get_partner_context(partner)
                .await?;
            scope.dispose();
            to_json(&context)
        }
        Command::Registrations => to_json(&composition.registrations()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("Failed to serialize command output")
}
