//! Palo Alto PAN-OS to FortiGate configuration translation.
//!
//! Reads a PAN-OS XML export and produces a FortiGate CLI script covering the
//! parts that map directly between the two platforms: VLAN interfaces with
//! their DHCP relay servers, BGP peer groups and neighbors, and static
//! routes. The translation is a single pass over a read-only tree.
//!
//! # Architecture
//!
//! - [`naming`] — PAN-OS unit names to FortiGate VLAN interface names
//! - [`extract`] — typed, borrowed views of the export (interfaces, DHCP
//!   relay bindings, BGP, static routes)
//! - [`emit`] — FortiGate CLI rendering with balanced `config`/`edit` blocks
//! - [`defaults`] — the table of literal values the output falls back to
//! - [`translate`] — runs extraction and rendering for one document
//! - [`conversion_summary`] — counts for the run, logged on completion
//!
//! # Examples
//!
//! ```ignore
//! use config_tree::parse_file;
//! use pafg_convert::defaults::embedded_defaults;
//! use pafg_convert::translate::translate;
//!
//! let tree = parse_file("running-config.xml".as_ref())?;
//! let out = translate(&tree, &embedded_defaults())?;
//! std::fs::write(out.output_file_name(), out.script)?;
//! ```

pub mod conversion_summary;
pub mod defaults;
pub mod emit;
pub mod error;
pub mod extract;
pub mod naming;
pub mod translate;
