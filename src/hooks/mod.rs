pub mod use_sidebar_state;
