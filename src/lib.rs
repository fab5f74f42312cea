// Library root
// -----------
// The binary (`main.rs`) wires these modules together; keeping them on
// the library side lets the integration tests drive the handlers and
// the HTTP client directly against a mock server.
//
// Module responsibilities:
// - `api`: blocking HTTP client for the Vagrant Cloud API, wire types
//   and the status-to-error translation.
// - `cli`: clap argument definitions and console rendering (tables,
//   timestamps).
// - `commands`: one handler per subcommand plus the exit-code mapping.
pub mod api;
pub mod cli;
pub mod commands;
