pub mod app;         // dashboard state + event loop
pub mod config;      // CLI / env configuration
pub mod error;       // unified error type
pub mod market_data; // upstream API client + polling
pub mod telemetry;   // tracing setup
pub mod ui;          // terminal rendering
