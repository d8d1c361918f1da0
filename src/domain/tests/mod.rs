mod tests_declare;
