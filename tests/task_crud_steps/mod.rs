//! Step definitions for task CRUD BDD scenarios.


mod then;
mod when;
