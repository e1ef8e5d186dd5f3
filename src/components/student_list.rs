//! 学生一覧コンポーネント

use crate::app::Student;
use gloo::dialogs::confirm;
use leptos::prelude::*;

const DELETE_CONFIRM_MESSAGE: &str = "この学生を削除してもよろしいですか？";

#[component]
pub fn StudentList<F>(students: ReadSignal<Vec<Student>>, on_delete: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="student-list">
            <h2>"学生一覧"</h2>
            <Show
                when=move || !students.get().is_empty()
                fallback=|| view! { <p class="text-muted">"登録された学生はいません"</p> }
            >
                <For
                    each=move || students.get()
                    key=|student| student.id.clone()
                    children={
                        let on_delete = on_delete.clone();
                        move |student| {
                        let on_delete = on_delete.clone();
                        view! {
                            <div class="student-row">
                                <span class="student-name">{student.name.clone()}</span>
                                <button
                                    class="btn btn-small btn-tertiary delete-btn"
                                    on:click={
                                        let student_id = student.id.clone();
                                        move |_| {
                                            if confirm(DELETE_CONFIRM_MESSAGE) {
                                                on_delete(student_id.clone());
                                            }
                                        }
                                    }
                                >
                                    "削除"
                                </button>
                            </div>
                        }
                    }
                    }
                />
            </Show>
        </div>
    }
}
