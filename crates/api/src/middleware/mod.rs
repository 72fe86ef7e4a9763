pub mod db_conn;
