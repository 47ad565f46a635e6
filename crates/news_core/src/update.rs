use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FiltersChanged(change) => {
            state.search_mut().apply_filters(change);
            vec![Effect::Refresh]
        }
        Msg::GoToPage(n) => refresh_if(state.search_mut().go_to_page(n)),
        Msg::NextPage => refresh_if(state.search_mut().next_page()),
        Msg::PreviousPage => refresh_if(state.search_mut().previous_page()),
        Msg::BookmarkToggled(id) => {
            let bookmarked = state.toggle_bookmark(&id);
            vec![
                Effect::PersistBookmarks(state.bookmarks().clone()),
                Effect::BookmarkChanged { id, bookmarked },
            ]
        }
        Msg::RefreshRequested => vec![Effect::Refresh],
    };

    (state, effects)
}

fn refresh_if(moved: bool) -> Vec<Effect> {
    if moved {
        vec![Effect::Refresh]
    } else {
        Vec::new()
    }
}
