//! Presentational building blocks shared by the screens. Pure functions of
//! their inputs; none of them touch the network.

pub mod brand_card;
pub mod error_view;
pub mod follow_button;
pub mod loading;
