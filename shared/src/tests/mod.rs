mod mock_client_tests;
