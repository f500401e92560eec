//! Unit tests for the task domain and service layer.
