pub mod path_cheapest_arc;
