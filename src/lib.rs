//! Bootstraps and reconciles the access-control and repository topology of
//! a multi-tenant Git forge: organization, permission-scoped teams,
//! repositories, team bindings and the pipeline webhook.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod errlog;
pub mod forge;
pub mod reconcile;
pub mod templates;
