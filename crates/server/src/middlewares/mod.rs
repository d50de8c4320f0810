// Copyright 2025 Alexandre D. Díaz
pub mod not_found;
