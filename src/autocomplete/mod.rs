pub mod autocomplete_render;
mod autocomplete_state;
mod input_props;
mod renderer;
mod view;

pub use autocomplete_render::{OptionHitbox, render_autocomplete};
pub use autocomplete_state::{AutocompleteEvent, AutocompleteState, CommitBehavior};
pub use input_props::{DEFAULT_INPUT_TITLE, InputProps};
pub use renderer::{PlainRenderer, RenderContext, RenderError, SuggestionRenderer};
pub use view::{
    AutocompleteView, Dropdown, InputView, OPTION_ID_PREFIX, OptionItem, SuggestionsContainer,
    option_id,
};
