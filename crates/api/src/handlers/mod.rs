pub mod seashell;
