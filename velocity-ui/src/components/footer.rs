//! Footer Component

use chrono::Datelike;
use leptos::*;
use leptos_router::*;

use crate::content::{COMPANY_NAME, PRODUCT_NAME};

/// `© <year> Velocity Logic Inc.`
pub fn copyright_line(year: i32) -> String {
    format!("© {} {}", year, COMPANY_NAME)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="border-t border-gray-500/20 py-10 mt-16">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-gray-400">
                <A href="/" class="flex items-center space-x-2 font-semibold">
                    <span class="text-indigo-500">"⚡"</span>
                    <span>{PRODUCT_NAME}</span>
                </A>
                <div class="flex space-x-6">
                    <a href="#" class="hover:text-indigo-400">"Privacy"</a>
                    <a href="#" class="hover:text-indigo-400">"Terms"</a>
                    <a href="#" class="hover:text-indigo-400">"Contact"</a>
                </div>
                <p>{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "© 2025 Velocity Logic Inc.");
    }
}
