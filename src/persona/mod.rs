pub mod catalog;
pub mod selection;

pub use catalog::{
    all_personas, browse_personas, discovery_personas, featured_personas, find_persona,
    search_personas, Persona,
};
pub use selection::{
    clear_selected_persona, load_selected_persona, parse_selected_persona, resolve_persona,
    save_selected_persona, SelectedPersona,
};
