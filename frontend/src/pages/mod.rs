pub mod university_search_page;
