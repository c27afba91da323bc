use dioxus::prelude::*;

use ui::{NoticeProvider, SessionProvider};
use views::{
    AuthorDashboard, Blogs, CreatePost, EditPost, Home, Login, PostDetail, Register,
    UserDashboard,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/home", || Route::Home {})]
    #[route("/")]
    Home {},
    #[route("/blogs")]
    Blogs {},
    #[route("/blog/:id")]
    PostDetail { id: String },
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Register {},
    #[route("/user/dashboard")]
    UserDashboard {},
    #[route("/author/dashboard")]
    AuthorDashboard {},
    #[route("/create/post")]
    CreatePost {},
    #[route("/update/post/:id")]
    EditPost { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            NoticeProvider {
                Router::<Route> {}
            }
        }
    }
}
