//! Per-module tests mirroring the `src` tree
