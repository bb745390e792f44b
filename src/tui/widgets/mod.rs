pub mod facet_bar;
