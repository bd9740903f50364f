pub mod layout_vars;
