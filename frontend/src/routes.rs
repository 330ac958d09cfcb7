use dioxus::prelude::*;

use crate::components::header::DashboardHeader;
use crate::pages::dashboard_page::DashboardPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardHeader)]


    #[route("/")]
    DashboardPage {},

}
