use super::*;
use crate::domain::ThemePreference;
use crate::storage::{JsonStorage, PreferenceStore};
use crate::ui::theme::ThemePalettes;
use crate::ui::viewmodel::BodyView;

fn new_state() -> AppState {
    AppState::new(
        SearchSettings {
            endpoint: "https://search.test/".to_string(),
            download_dir: ".".to_string(),
        },
        Appearance::default(),
    )
}

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

fn type_query(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

/// Types `text`, submits and returns the request id of the issued fetch.
fn submit(state: &mut AppState, text: &str) -> u64 {
    state.query.clear();
    state.focus = InputFocus::Query;
    type_query(state, text);
    match send(state, Event::Submit).as_slice() {
        [Action::FetchResults { request_id, .. }] => *request_id,
        other => panic!("expected one fetch, got {other:?}"),
    }
}

fn respond(state: &mut AppState, request_id: u64, status: u16, body: &str) {
    send(
        state,
        Event::SearchResponse {
            request_id,
            status,
            body: body.as_bytes().to_vec(),
        },
    );
}

fn status_text(state: &AppState) -> Option<&str> {
    match &state.ui {
        UiState::Status(status) => Some(status.text.as_str()),
        _ => None,
    }
}

#[test]
fn blank_query_shows_validation_message_without_fetch() {
    for input in ["", "   ", "\t "] {
        let mut state = new_state();
        type_query(&mut state, input);
        let actions = send(&mut state, Event::Submit);

        assert!(actions.is_empty(), "{input:?} issued {actions:?}");
        assert_eq!(status_text(&state), Some("Please enter an app name to search."));
        assert!(!state.ui.is_loading());
    }
}

#[test]
fn submit_encodes_trimmed_query() {
    let mut state = new_state();
    type_query(&mut state, "  tik tok&co ");
    let actions = send(&mut state, Event::Submit);

    assert_eq!(
        actions,
        vec![Action::FetchResults {
            request_id: 1,
            url: "https://search.test/?query=tik%20tok%26co".to_string(),
        }]
    );
}

#[test]
fn loading_disables_control_and_shows_three_placeholders() {
    let mut state = new_state();
    let id = submit(&mut state, "maps");

    let vm = state.compute_viewmodel(30, 80);
    assert!(!vm.search_bar.button_enabled);
    assert_eq!(vm.search_bar.button_label, "Searching...");
    assert_eq!(vm.body.skeleton_count(), 3);
    assert_eq!(vm.body.result_item_count(), 0);

    respond(&mut state, id, 200, r#"[{"name":"Maps"}]"#);

    let vm = state.compute_viewmodel(30, 80);
    assert!(vm.search_bar.button_enabled);
    assert_eq!(vm.search_bar.button_label, "Search APK");
    assert_eq!(vm.body.skeleton_count(), 0);
}

#[test]
fn results_render_in_order_with_fallbacks() {
    let mut state = new_state();
    let id = submit(&mut state, "app");
    respond(
        &mut state,
        id,
        200,
        r#"[
            {"name":"First","version":"1.0","filesize":"10 MB","image":"https://x/i.png","path":"https://x/1.apk"},
            {},
            {"name":"Third","version":"","filesize":null}
        ]"#,
    );

    assert_eq!(state.ui, UiState::Results);
    assert_eq!(state.focus, InputFocus::Results);

    let vm = state.compute_viewmodel(40, 100);
    let BodyView::Results { items, total } = vm.body else {
        panic!("expected results");
    };
    assert_eq!(total, 3);
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["First", "Unknown App", "Third"]);

    assert_eq!(items[0].version, "1.0");
    assert_eq!(items[0].size, "10 MB");
    assert!(items[0].has_icon);
    assert!(items[0].is_selected);

    assert_eq!(items[1].version, "N/A");
    assert_eq!(items[1].size, "N/A");
    assert!(!items[1].has_icon);

    assert_eq!(items[2].version, "N/A");
    assert_eq!(items[2].size, "N/A");
}

#[test]
fn empty_list_shows_no_results_message() {
    let mut state = new_state();
    let id = submit(&mut state, "nothing");
    respond(&mut state, id, 200, "[]");

    assert_eq!(
        status_text(&state),
        Some("No apps found for your search. Please try another name.")
    );
    assert_eq!(state.compute_viewmodel(30, 80).body.result_item_count(), 0);
}

#[test]
fn non_list_json_answer_shows_no_results_message() {
    for body in [r#"{"error":"not found"}"#, "{}", "0", r#""""#, "null"] {
        let mut state = new_state();
        let id = submit(&mut state, "zzz");
        respond(&mut state, id, 200, body);

        assert_eq!(
            status_text(&state),
            Some("No apps found for your search. Please try another name."),
            "{body}"
        );
        assert!(state.results.is_empty());
    }
}

#[test]
fn server_error_and_bad_body_show_fetch_failure() {
    for (status, body) in [(500, "[]"), (404, r#"{"error":"x"}"#), (200, "not json"), (200, "")] {
        let mut state = new_state();
        let id = submit(&mut state, "maps");
        respond(&mut state, id, status, body);

        assert_eq!(
            status_text(&state),
            Some("Failed to fetch app data. Please check your connection."),
            "{status} {body}"
        );
        assert!(state.compute_viewmodel(30, 80).search_bar.button_enabled);
    }
}

#[test]
fn new_search_replaces_previous_results() {
    let mut state = new_state();
    let id = submit(&mut state, "a");
    respond(&mut state, id, 200, r#"[{"name":"A"},{"name":"B"}]"#);
    let id = submit(&mut state, "c");
    respond(&mut state, id, 200, r#"[{"name":"C"}]"#);

    let names: Vec<&str> = state.results.iter().map(|r| r.display_name()).collect();
    assert_eq!(names, ["C"]);
}

#[test]
fn stale_response_is_ignored() {
    let mut state = new_state();
    let first = submit(&mut state, "old");
    let second = submit(&mut state, "new");
    assert!(second > first);

    respond(&mut state, first, 200, r#"[{"name":"Old"}]"#);
    assert!(state.ui.is_loading());
    assert!(state.results.is_empty());

    respond(&mut state, second, 200, r#"[{"name":"New"}]"#);
    assert_eq!(state.results[0].display_name(), "New");

    respond(&mut state, first, 500, "");
    assert_eq!(state.ui, UiState::Results);
}

#[test]
fn blank_submit_invalidates_in_flight_search() {
    let mut state = new_state();
    let id = submit(&mut state, "maps");
    state.query.clear();
    send(&mut state, Event::Submit);

    respond(&mut state, id, 200, r#"[{"name":"Maps"}]"#);
    assert_eq!(status_text(&state), Some("Please enter an app name to search."));
}

#[test]
fn download_emits_command_and_success_status() {
    let mut state = new_state();
    let id = submit(&mut state, "my");
    respond(
        &mut state,
        id,
        200,
        r#"[{"name":"My App!","path":"https://cdn.test/my.apk"}]"#,
    );

    let actions = send(&mut state, Event::Download);
    assert_eq!(
        actions,
        vec![
            Action::StartDownload {
                url: "https://cdn.test/my.apk".to_string(),
                destination: "My_App_.apk".to_string(),
                file_name: "My_App_.apk".to_string(),
            },
            Action::ScheduleTimer {
                seconds: STATUS_DISMISS_SECONDS
            },
        ]
    );

    let text = status_text(&state).unwrap();
    assert!(text.contains("My App!"));
    assert_eq!(text, "Download for My App! has started.");
    assert_eq!(state.results.len(), 1);
}

#[test]
fn download_again_while_success_banner_is_visible() {
    let mut state = new_state();
    let id = submit(&mut state, "ap");
    respond(
        &mut state,
        id,
        200,
        r#"[{"name":"One","path":"https://cdn.test/1.apk"},{"name":"Two","path":"https://cdn.test/2.apk"}]"#,
    );
    send(&mut state, Event::Download);
    assert_eq!(status_text(&state), Some("Download for One has started."));

    send(&mut state, Event::KeyDown);
    let actions = send(&mut state, Event::Download);
    assert!(matches!(
        actions.first(),
        Some(Action::StartDownload { file_name, .. }) if file_name == "Two.apk"
    ));
    assert_eq!(status_text(&state), Some("Download for Two has started."));

    // The first banner's timer must not hide the second one.
    assert!(!handle_event(&mut state, &Event::Timer).unwrap().0);
    assert_eq!(status_text(&state), Some("Download for Two has started."));
    assert!(handle_event(&mut state, &Event::Timer).unwrap().0);
    assert_eq!(state.ui, UiState::Results);
}

#[test]
fn download_does_nothing_without_results() {
    let mut state = new_state();
    send(&mut state, Event::FocusResults);
    assert!(send(&mut state, Event::Download).is_empty());
    assert_eq!(state.ui, UiState::Idle);
}

#[test]
fn download_without_path_reports_failure_and_keeps_results() {
    let mut state = new_state();
    let id = submit(&mut state, "x");
    respond(&mut state, id, 200, r#"[{"name":"X"}]"#);

    let actions = send(&mut state, Event::Download);
    assert!(actions.is_empty());
    assert_eq!(status_text(&state), Some("Failed to start the download."));

    send(&mut state, Event::Dismiss);
    assert_eq!(state.ui, UiState::Results);
    assert_eq!(state.results.len(), 1);
}

#[test]
fn success_status_clears_on_timer_but_error_persists() {
    let mut state = new_state();
    let id = submit(&mut state, "my");
    respond(&mut state, id, 200, r#"[{"name":"My","path":"https://cdn.test/my.apk"}]"#);
    send(&mut state, Event::Download);
    assert!(status_text(&state).is_some());

    let (render, _) = handle_event(&mut state, &Event::Timer).unwrap();
    assert!(render);
    assert_eq!(state.ui, UiState::Results);

    let mut state = new_state();
    type_query(&mut state, " ");
    send(&mut state, Event::Submit);
    let (render, _) = handle_event(&mut state, &Event::Timer).unwrap();
    assert!(!render);
    assert_eq!(status_text(&state), Some("Please enter an app name to search."));
}

#[test]
fn theme_toggle_round_trips_through_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut storage = JsonStorage::new(path.clone()).unwrap();
    let mut state = AppState::new(
        new_state().settings,
        Appearance::init(
            storage.theme_preference().unwrap(),
            Some(ThemePreference::Light),
            ThemePalettes::default(),
        ),
    );
    assert!(!state.appearance.is_dark());

    let actions = send(&mut state, Event::ToggleTheme);
    assert_eq!(actions, vec![Action::PersistTheme(ThemePreference::Dark)]);
    storage.set_theme_preference(ThemePreference::Dark).unwrap();
    assert!(state.compute_viewmodel(30, 80).header.theme_toggle.starts_with("[x]"));

    let reopened = JsonStorage::new(path).unwrap();
    let appearance = Appearance::init(
        reopened.theme_preference().unwrap(),
        Some(ThemePreference::Light),
        ThemePalettes::default(),
    );
    assert!(appearance.is_dark());
    assert_eq!(appearance.preference(), ThemePreference::Dark);
}

#[test]
fn theme_toggles_from_idle_through_result_focus() {
    let mut state = new_state();
    assert_eq!(state.ui, UiState::Idle);
    assert!(state.results.is_empty());

    let (render, _) = handle_event(&mut state, &Event::FocusResults).unwrap();
    assert!(render);
    assert_eq!(state.focus, InputFocus::Results);

    let actions = send(&mut state, Event::ToggleTheme);
    assert_eq!(actions, vec![Action::PersistTheme(ThemePreference::Dark)]);
    assert!(state.appearance.is_dark());
    assert_eq!(state.ui, UiState::Idle);

    send(&mut state, Event::FocusSearchBar);
    type_query(&mut state, "t");
    assert_eq!(state.query, "t");
}

#[test]
fn theme_toggles_after_search_error() {
    let mut state = new_state();
    let id = submit(&mut state, "maps");
    respond(&mut state, id, 500, "");
    assert_eq!(state.focus, InputFocus::Query);

    send(&mut state, Event::FocusResults);
    assert_eq!(
        send(&mut state, Event::ToggleTheme),
        vec![Action::PersistTheme(ThemePreference::Dark)]
    );
}

#[test]
fn dismiss_backs_out_then_closes() {
    let mut state = new_state();
    type_query(&mut state, "abc");

    assert!(send(&mut state, Event::Dismiss).is_empty());
    assert!(state.query.is_empty());
    assert_eq!(send(&mut state, Event::Dismiss), vec![Action::CloseFocus]);
}

#[test]
fn denied_permissions_are_reported_and_block_searching() {
    let mut state = new_state();
    send(&mut state, Event::PermissionsResult { granted: false });
    assert_eq!(
        status_text(&state),
        Some("Permissions were not granted. Reopen the plugin to allow searching and downloads.")
    );

    type_query(&mut state, "maps");
    assert!(send(&mut state, Event::Submit).is_empty());
    assert_eq!(
        status_text(&state),
        Some("Web access was not granted. Reopen the plugin to allow searching.")
    );
}

#[test]
fn denied_commands_block_download_with_message() {
    let mut state = new_state();
    let id = submit(&mut state, "my");
    respond(&mut state, id, 200, r#"[{"name":"My","path":"https://cdn.test/my.apk"}]"#);
    state.run_commands = false;

    assert!(send(&mut state, Event::Download).is_empty());
    assert_eq!(
        status_text(&state),
        Some("Running commands was not granted. Reopen the plugin to allow downloads.")
    );
    assert_eq!(state.results.len(), 1);
}
