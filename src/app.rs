//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    header::Header,
    notice::{Notice, NoticeBanner},
    register_form::RegisterForm,
    student_list::StudentList,
    recognition_panel::RecognitionPanel,
};

/// 登録済み学生
#[derive(Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (students, set_students) = signal(Vec::<Student>::new());
    let (notice, set_notice) = signal(None::<Notice>);

    // 学生登録ハンドラ（バリデーション通過後に呼ばれる）
    let on_register = move |name: String| {
        let student = Student {
            id: format!("{}-{}", name, js_sys::Date::now()),
            name,
        };
        set_students.update(|s| s.push(student));
        set_notice.set(Some(Notice::success("学生を登録しました。")));
    };

    // 学生削除ハンドラ（確認ダイアログは StudentList 側で通過済み）
    let on_delete = move |id: String| {
        set_students.update(|s| s.retain(|student| student.id != id));
    };

    // 認識結果ハンドラ
    let on_notice = move |notice: Notice| {
        set_notice.set(Some(notice));
    };

    view! {
        <div class="container">
            <Header />

            <NoticeBanner notice=notice />

            <RegisterForm on_register=on_register />

            <StudentList students=students on_delete=on_delete />

            <RecognitionPanel on_notice=on_notice />
        </div>
    }
}
