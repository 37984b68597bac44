// IBD Daily Tracker - desktop log for symptoms and food intake
// Entry point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    ibd_tracker::run();
}
