//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Smart Attendance - 顔認識出席管理"</h1>
        </header>
    }
}
